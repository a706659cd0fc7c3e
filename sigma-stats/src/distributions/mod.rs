//! Reference distributions: normal, t, F

pub mod normal;
pub mod t;
pub mod f;
pub mod special;

pub use normal::{normal_cdf, normal_critical, normal_inv, normal_pdf, normal_sf};
pub use t::{t_cdf, t_critical, t_inv, t_pdf, t_sf, t_two_tailed};
pub use f::{f_cdf, f_pdf, f_sf};
