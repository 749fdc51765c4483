pub mod answer_service;
pub mod template_service;
