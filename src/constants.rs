//! Type-info result set constants.
//!
//! Column names follow the standard `getTypeInfo` result layout; type codes are
//! the standard SQL type identifiers reported in its `DATA_TYPE` column.

// Type-info result columns
pub const COL_TYPE_NAME: &str = "TYPE_NAME";
pub const COL_DATA_TYPE: &str = "DATA_TYPE";
pub const COL_PRECISION: &str = "PRECISION";
pub const COL_LITERAL_PREFIX: &str = "LITERAL_PREFIX";
pub const COL_LITERAL_SUFFIX: &str = "LITERAL_SUFFIX";
pub const COL_CREATE_PARAMS: &str = "CREATE_PARAMS";
pub const COL_NULLABLE: &str = "NULLABLE";
pub const COL_CASE_SENSITIVE: &str = "CASE_SENSITIVE";
pub const COL_SEARCHABLE: &str = "SEARCHABLE";
pub const COL_UNSIGNED_ATTRIBUTE: &str = "UNSIGNED_ATTRIBUTE";
pub const COL_FIXED_PREC_SCALE: &str = "FIXED_PREC_SCALE";
pub const COL_AUTO_INCREMENT: &str = "AUTO_INCREMENT";
pub const COL_LOCAL_TYPE_NAME: &str = "LOCAL_TYPE_NAME";
pub const COL_MINIMUM_SCALE: &str = "MINIMUM_SCALE";
pub const COL_MAXIMUM_SCALE: &str = "MAXIMUM_SCALE";
pub const COL_SQL_DATA_TYPE: &str = "SQL_DATA_TYPE";
pub const COL_SQL_DATETIME_SUB: &str = "SQL_DATETIME_SUB";
pub const COL_NUM_PREC_RADIX: &str = "NUM_PREC_RADIX";

/// All type-info columns in result set order.
pub const TYPE_INFO_COLUMNS: [&str; 18] = [
    COL_TYPE_NAME,
    COL_DATA_TYPE,
    COL_PRECISION,
    COL_LITERAL_PREFIX,
    COL_LITERAL_SUFFIX,
    COL_CREATE_PARAMS,
    COL_NULLABLE,
    COL_CASE_SENSITIVE,
    COL_SEARCHABLE,
    COL_UNSIGNED_ATTRIBUTE,
    COL_FIXED_PREC_SCALE,
    COL_AUTO_INCREMENT,
    COL_LOCAL_TYPE_NAME,
    COL_MINIMUM_SCALE,
    COL_MAXIMUM_SCALE,
    COL_SQL_DATA_TYPE,
    COL_SQL_DATETIME_SUB,
    COL_NUM_PREC_RADIX,
];

// Searchability codes
pub const TYPE_PRED_NONE: i16 = 0;
pub const TYPE_PRED_CHAR: i16 = 1;
pub const TYPE_PRED_BASIC: i16 = 2;
pub const TYPE_SEARCHABLE: i16 = 3;

// Nullability codes
pub const TYPE_NO_NULLS: i16 = 0;
pub const TYPE_NULLABLE: i16 = 1;
pub const TYPE_NULLABLE_UNKNOWN: i16 = 2;

// Standard SQL type codes
pub const SQL_TYPE_BIT: i32 = -7;
pub const SQL_TYPE_TINYINT: i32 = -6;
pub const SQL_TYPE_SMALLINT: i32 = 5;
pub const SQL_TYPE_INTEGER: i32 = 4;
pub const SQL_TYPE_BIGINT: i32 = -5;
pub const SQL_TYPE_FLOAT: i32 = 6;
pub const SQL_TYPE_REAL: i32 = 7;
pub const SQL_TYPE_DOUBLE: i32 = 8;
pub const SQL_TYPE_NUMERIC: i32 = 2;
pub const SQL_TYPE_DECIMAL: i32 = 3;
pub const SQL_TYPE_CHAR: i32 = 1;
pub const SQL_TYPE_VARCHAR: i32 = 12;
pub const SQL_TYPE_LONGVARCHAR: i32 = -1;
pub const SQL_TYPE_DATE: i32 = 91;
pub const SQL_TYPE_TIME: i32 = 92;
pub const SQL_TYPE_TIMESTAMP: i32 = 93;
pub const SQL_TYPE_BINARY: i32 = -2;
pub const SQL_TYPE_VARBINARY: i32 = -3;
pub const SQL_TYPE_LONGVARBINARY: i32 = -4;
pub const SQL_TYPE_NULL: i32 = 0;
pub const SQL_TYPE_OTHER: i32 = 1111;
pub const SQL_TYPE_JAVA_OBJECT: i32 = 2000;
pub const SQL_TYPE_DISTINCT: i32 = 2001;
pub const SQL_TYPE_STRUCT: i32 = 2002;
pub const SQL_TYPE_ARRAY: i32 = 2003;
pub const SQL_TYPE_BLOB: i32 = 2004;
pub const SQL_TYPE_CLOB: i32 = 2005;
pub const SQL_TYPE_REF: i32 = 2006;
pub const SQL_TYPE_DATALINK: i32 = 70;
pub const SQL_TYPE_BOOLEAN: i32 = 16;
pub const SQL_TYPE_ROWID: i32 = -8;
pub const SQL_TYPE_NCHAR: i32 = -15;
pub const SQL_TYPE_NVARCHAR: i32 = -9;
pub const SQL_TYPE_LONGNVARCHAR: i32 = -16;
pub const SQL_TYPE_NCLOB: i32 = 2011;
pub const SQL_TYPE_SQLXML: i32 = 2009;

/// Standard name for a SQL type code, if it is one of the standard codes.
pub fn sql_type_name(code: i32) -> Option<&'static str> {
    let name = match code {
        SQL_TYPE_BIT => "BIT",
        SQL_TYPE_TINYINT => "TINYINT",
        SQL_TYPE_SMALLINT => "SMALLINT",
        SQL_TYPE_INTEGER => "INTEGER",
        SQL_TYPE_BIGINT => "BIGINT",
        SQL_TYPE_FLOAT => "FLOAT",
        SQL_TYPE_REAL => "REAL",
        SQL_TYPE_DOUBLE => "DOUBLE",
        SQL_TYPE_NUMERIC => "NUMERIC",
        SQL_TYPE_DECIMAL => "DECIMAL",
        SQL_TYPE_CHAR => "CHAR",
        SQL_TYPE_VARCHAR => "VARCHAR",
        SQL_TYPE_LONGVARCHAR => "LONGVARCHAR",
        SQL_TYPE_DATE => "DATE",
        SQL_TYPE_TIME => "TIME",
        SQL_TYPE_TIMESTAMP => "TIMESTAMP",
        SQL_TYPE_BINARY => "BINARY",
        SQL_TYPE_VARBINARY => "VARBINARY",
        SQL_TYPE_LONGVARBINARY => "LONGVARBINARY",
        SQL_TYPE_NULL => "NULL",
        SQL_TYPE_OTHER => "OTHER",
        SQL_TYPE_JAVA_OBJECT => "JAVA_OBJECT",
        SQL_TYPE_DISTINCT => "DISTINCT",
        SQL_TYPE_STRUCT => "STRUCT",
        SQL_TYPE_ARRAY => "ARRAY",
        SQL_TYPE_BLOB => "BLOB",
        SQL_TYPE_CLOB => "CLOB",
        SQL_TYPE_REF => "REF",
        SQL_TYPE_DATALINK => "DATALINK",
        SQL_TYPE_BOOLEAN => "BOOLEAN",
        SQL_TYPE_ROWID => "ROWID",
        SQL_TYPE_NCHAR => "NCHAR",
        SQL_TYPE_NVARCHAR => "NVARCHAR",
        SQL_TYPE_LONGNVARCHAR => "LONGNVARCHAR",
        SQL_TYPE_NCLOB => "NCLOB",
        SQL_TYPE_SQLXML => "SQLXML",
        _ => return None,
    };
    Some(name)
}
