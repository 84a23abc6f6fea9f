mod survey_client;

pub use survey_client::SurveyClient;
