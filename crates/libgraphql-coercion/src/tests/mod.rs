mod coercion_error_tests;
