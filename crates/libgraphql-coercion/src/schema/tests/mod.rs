mod schema_lookup_tests;
