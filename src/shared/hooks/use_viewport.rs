use dioxus::prelude::*;

use crate::domain::models::ShellState;

/// Keep the device class (and the sidebar it drives) in sync with the window width
pub fn use_viewport_sync(state: Signal<ShellState>, breakpoint: f64) {
    use_hook(move || {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::closure::Closure;
            use wasm_bindgen::JsCast;

            let Some(window) = web_sys::window() else {
                return;
            };

            let mut state = state;
            let mut apply = move || {
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|v| v.as_f64());
                if let Some(width) = width {
                    let current = state.peek().ui;
                    let mut next = current;
                    next.apply_viewport(width, breakpoint);
                    if next != current {
                        state.write().ui = next;
                    }
                }
            };

            apply();

            let listener = Closure::<dyn FnMut()>::new(apply);
            if let Err(e) = window
                .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to register resize listener: {:?}", e);
            }
            // The listener lives as long as the page
            listener.forget();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (state, breakpoint);
        }
    });
}
