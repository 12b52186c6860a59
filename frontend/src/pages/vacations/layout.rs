use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn VacationsLayout(on_add: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Vacations"</h2>
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| on_add.call(())
                    >
                        "+ Add Vacation"
                    </button>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
