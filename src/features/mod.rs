pub mod submissions;
pub mod survey_page;
