mod match_service_test;
