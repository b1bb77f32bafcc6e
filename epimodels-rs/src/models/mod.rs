use crate::{epidemic::Compartmental, params::*, prelude::Real};
use paste::paste;

pub mod seir;
pub mod sir;
pub use seir::*;
pub use sir::*;

/// Implements named accessors for each compartment of a concrete model and a
/// getter for the whole state as a tuple.
macro_rules! compartments {
    (@real $name:ident) => { Real };
    ($params:ty, $n:literal, $tuple:ident { $($name:ident: $idx:literal),* $(,)? }) => {
        paste! {
            impl Compartmental<$params, $n> {
                $(
                    #[doc = "Current value of the `" $name "` compartment."]
                    pub fn $name(&self) -> Real {
                        self.state()[$idx]
                    }
                )*

                #[doc = "Return all compartments as a `" $tuple "` tuple."]
                pub fn $tuple(&self) -> ($(compartments!(@real $name)),*) {
                    ($(self.$name()),*)
                }
            }
        }
    };
}

compartments!(SIRParams, 3, sir { s: 0, i: 1, r: 2 });
compartments!(SEIRParams, 4, seir { s: 0, e: 1, i: 2, r: 3 });
