pub mod expand_prompt_dto;
