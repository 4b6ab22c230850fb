mod html_parser_tests;
