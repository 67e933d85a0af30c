mod view;

pub use view::LaunchingScreen;
