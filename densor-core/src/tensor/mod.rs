pub mod dense;
pub mod view;

pub use dense::Tensor;
pub use view::{TensorView, TensorViewMut};
