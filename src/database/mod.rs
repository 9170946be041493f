pub mod storage_table;
