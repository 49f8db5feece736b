pub mod expansion;
