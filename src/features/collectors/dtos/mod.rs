mod collector_dto;

pub use collector_dto::{
    AssignedLocationDto, CollectorRequestDto, CollectorResponseDto, LocationAssignmentDto,
};
