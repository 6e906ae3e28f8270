pub mod chat;
pub mod home;
pub mod login;
pub mod shared;
pub mod signup;

pub use chat::ChatBotWidget;
pub use home::HomeView;
pub use login::LoginView;
pub use signup::SignupView;
