//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for use case inputs and outputs.

mod register_item_dto;

pub use register_item_dto::{
    MAX_ACCOUNT_LEN, RegisterItemRequestDto, RegisterItemResultDto, UnregisterItemRequestDto,
};
