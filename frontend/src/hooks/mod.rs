pub mod use_fortune;
