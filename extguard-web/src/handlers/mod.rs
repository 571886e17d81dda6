pub mod extensions;
pub mod pages;
pub mod static_resources;

pub use extensions::*;
pub use pages::*;
pub use static_resources::*;
