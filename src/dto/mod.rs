pub mod health_dto;
pub mod report_dto;
