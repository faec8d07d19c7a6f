pub mod mock_evaluator;
