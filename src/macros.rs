// src/macros.rs
#[macro_export]
macro_rules! s {
    // s!() is an empty String, s!(x) is String::from(x)
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
