mod descriptor;
mod entry;

pub use descriptor::{BundleDescriptor, render};
pub use entry::KeyValue;
