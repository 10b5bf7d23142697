pub mod console;
pub mod debounce;
