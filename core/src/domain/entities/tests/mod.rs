mod identity_tests;
