mod home;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::QuizView;
pub use state::ViewError;
