mod view;

pub use view::UploadScreen;
