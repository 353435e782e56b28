mod summary;
mod view;

pub use view::Sales;
