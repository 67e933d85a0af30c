mod view;

pub use view::WorkersScreen;
