mod crawl_tests;
mod output_tests;
