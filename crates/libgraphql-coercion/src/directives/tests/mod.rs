mod weaver_tests;
