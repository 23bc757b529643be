use std::io::{self, Write};

pub const TEMPLATE_FILE_NAME: &str = "financial_data_template.csv";

/// Reference upload with the full header row and one row per common case.
pub const TEMPLATE_CSV: &str = "\
Date,Transaction_Type,Amount,GST_Rate,GST_Amount,Category,Vendor_Client,Description,Invoice_Number,Payment_Status
2024-01-15,Revenue,100000,18,18000,Product_Sales,ABC Corp,Product Sale Invoice,INV-001,Paid
2024-01-16,Expense,25000,18,4500,Office_Rent,XYZ Properties,Monthly Rent,RENT-001,Paid
2024-01-17,Revenue,75000,12,9000,Service_Income,DEF Ltd,Consulting Services,INV-002,Pending
2024-01-18,Expense,15000,0,0,Salary,Employee,Monthly Salary,SAL-001,Paid
2024-01-19,Expense,8000,18,1440,Marketing,Google Ads,Digital Marketing,MKT-001,Paid
";

pub fn write_template<W: Write>(mut writer: W) -> io::Result<()> {
    writer.write_all(TEMPLATE_CSV.as_bytes())?;
    writer.flush()
}
