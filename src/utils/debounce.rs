use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Window;

/// Creates a resize listener on `window` that only runs `callback` once no
/// resize event has arrived for `delay_ms`.
///
/// The listener is removed when the returned `EventListener` is dropped, so
/// keep it alive for as long as the component is mounted.
pub fn create_debounced_resize_listener<F>(window: &Window, callback: F, delay_ms: u32) -> EventListener
where
    F: Fn() + 'static,
{
    let timeout_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(window, "resize", move |_| {
        // Dropping a pending Timeout cancels it
        drop(timeout_handle.borrow_mut().take());

        let cb = callback.clone();
        let handle = Timeout::new(delay_ms, move || cb());
        *timeout_handle.borrow_mut() = Some(handle);
    })
}
