mod error_kind_test;
