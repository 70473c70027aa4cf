use leptos::prelude::*;
use orbit::ClientConfig;
use orbit_frontend::{App, web::logger};

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    logger::init(&config);
    log::info!("Orbit client starting, API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
