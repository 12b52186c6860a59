// The browser entry point is `vacations_frontend::start`, which wasm-bindgen
// runs once the module is instantiated.
use vacations_frontend as _;

fn main() {}
