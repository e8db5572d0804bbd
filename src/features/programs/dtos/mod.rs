mod program_dto;

pub use program_dto::{ProgramFormDto, ProgramRequestDto, ProgramResponseDto};
