//! Presenter Adapters
//!
//! Implementations of `RegisterItemPresenter`.

mod json;

pub use json::JsonRegisterItemPresenter;
