mod activity;
mod chart;
mod view;

pub use view::Dashboard;
