pub mod rating_calculator;
