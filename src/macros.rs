// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand.

    // No args → empty String
    () => {
        ::std::string::String::new()
    };
    // Anything else String::from accepts — literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
