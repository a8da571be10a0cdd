mod verification_attempt_tests;
