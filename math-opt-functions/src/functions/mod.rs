//! Evaluation rules, one per file.
//!
//! Every rule takes a single vector already expressed in its canonical
//! domain and reduces it to a scalar. Rescaling and noise are handled by
//! [`crate::Evaluator`].

pub mod langermann;
pub mod michalewicz;
pub mod rastrigin;
pub mod styblinski_tang;
pub mod zakharov;

pub use langermann::langermann;
pub use michalewicz::michalewicz;
pub use rastrigin::rastrigin;
pub use styblinski_tang::styblinski_tang;
pub use zakharov::zakharov;
