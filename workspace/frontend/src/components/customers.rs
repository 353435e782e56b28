mod view;

pub use view::Customers;
