use dyn_clone::DynClone;
use std::fmt::Debug;

pub mod math;
pub mod validate;

// NOTE: We have to use [`DynClone`] instead of plain old [`Clone`],
// Since we will be using `Arc<dyn Sun>` and `Box<dyn ...>` and we need to clone those
dyn_clone::clone_trait_object!(RtRequirement);
/// A simple marker trait that enforces a few other traits we need
/// in the sky model, since everything here is read from many render threads at once
pub trait RtRequirement: DynClone + Debug + Send + Sync {}
impl<T: DynClone + Debug + Send + Sync> RtRequirement for T {}
