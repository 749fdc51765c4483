pub mod answer_dto;
