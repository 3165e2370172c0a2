pub mod assemble;
pub mod error;
pub mod header;
pub mod image_file;
pub mod inspect;
pub mod layout;
pub mod types;

pub use assemble::{assemble, AssemblyReport, ASSEMBLY_STEPS};
pub use error::Result;
pub use inspect::{inspect, ImageReport};
