/// Visibility of the workout input form
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Hidden,
    Shown
}
