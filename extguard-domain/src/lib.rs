pub mod extension;
pub mod policy;
pub mod validation;

pub use extension::{Extension, ExtensionType, NewExtension, ParseExtensionTypeError};
pub use policy::{RegistryPolicy, DEFAULT_REGISTRANT};
pub use validation::{is_valid_extension_name, normalize_extension_name};
