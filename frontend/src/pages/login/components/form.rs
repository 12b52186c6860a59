use crate::components::toast::ToastHost;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Login"</h2>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm space-y-2">
                        <div>
                            <label for="email" class="block text-sm font-medium text-fg-muted">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                autocomplete="username"
                                class="appearance-none relative block w-full px-3 py-2 border border-form-control-border rounded-md bg-form-control-bg text-fg sm:text-sm"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-fg-muted">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                autocomplete="current-password"
                                class="appearance-none relative block w-full px-3 py-2 border border-form-control-border rounded-md bg-form-control-bg text-fg sm:text-sm"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
            <ToastHost/>
        </div>
    }
}
