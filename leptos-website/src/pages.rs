pub mod Home;
