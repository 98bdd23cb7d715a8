mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth_card;
pub use auth_card::{AuthCard, FieldError};

mod welcome;
pub use welcome::WelcomePage;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod forgot_password;
pub use forgot_password::ForgotPasswordView;

mod reset_password;
pub use reset_password::ResetPasswordView;
