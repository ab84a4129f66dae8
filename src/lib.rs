#[macro_use]
extern crate enum_primitive;

pub mod core;

#[cfg(test)]
pub mod test;

pub mod prelude {
    pub mod tables {
        include!(concat!(env!("OUT_DIR"), "/codegen.rs"));
    }

    pub use crate::core::*;
}
