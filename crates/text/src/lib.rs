mod case;
mod path;

pub use case::{snake_to_camel, snake_to_pascal, to_snake_case};
pub use path::find_windows_path;
