use std::cmp::Reverse;

const FIELD_COUNT: usize = 10;

/// Transaction attributes that have a dedicated column in the upload template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    TransactionType,
    Amount,
    GstRate,
    GstAmount,
    Category,
    VendorOrClient,
    Description,
    InvoiceNumber,
    PaymentStatus
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Date,
        Field::TransactionType,
        Field::Amount,
        Field::GstRate,
        Field::GstAmount,
        Field::Category,
        Field::VendorOrClient,
        Field::Description,
        Field::InvoiceNumber,
        Field::PaymentStatus
    ];

    /// The header this field is written under in the template.
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::TransactionType => "Transaction_Type",
            Field::Amount => "Amount",
            Field::GstRate => "GST_Rate",
            Field::GstAmount => "GST_Amount",
            Field::Category => "Category",
            Field::VendorOrClient => "Vendor_Client",
            Field::Description => "Description",
            Field::InvoiceNumber => "Invoice_Number",
            Field::PaymentStatus => "Payment_Status"
        }
    }
}

/// Header position of every known field, resolved once per upload.
///
/// Resolution runs in two passes. An exact (case-insensitive) header match claims its
/// column first, the rightmost one when a header repeats. Fields still unresolved then
/// take the first unclaimed header that contains their name, mirroring the loose match
/// used by validation. That pass runs longest name first, so `GST_Amount_Paid` goes to
/// `GST_Amount` before `Amount` can claim it. Headers claimed by no field are extra columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; FIELD_COUNT],
    extra: Vec<usize>
}

impl ColumnMap {
    pub fn resolve<H: AsRef<str>>(headers: &[H]) -> Self {
        let folded: Vec<String> = headers.iter()
            .map(|header| header.as_ref().trim().to_lowercase())
            .collect();

        let mut indices = [None; FIELD_COUNT];
        let mut claimed = vec![false; folded.len()];

        for field in Field::ALL {
            let name = field.column_name().to_lowercase();

            if let Some(index) = folded.iter().rposition(|header| *header == name) {
                indices[field as usize] = Some(index);
                claimed[index] = true;
            }
        }

        let mut by_length = Field::ALL;
        by_length.sort_by_key(|field| Reverse(field.column_name().len()));

        for field in by_length {
            if indices[field as usize].is_some() {
                continue;
            }

            let name = field.column_name().to_lowercase();
            let found = folded.iter()
                .enumerate()
                .find(|(index, header)| !claimed[*index] && header.contains(&name))
                .map(|(index, _)| index);

            if let Some(index) = found {
                indices[field as usize] = Some(index);
                claimed[index] = true;
            }
        }

        let extra = claimed.iter()
            .enumerate()
            .filter(|(_, claimed)| !**claimed)
            .map(|(index, _)| index)
            .collect();

        Self { indices, extra }
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.indices[field as usize]
    }

    pub fn extra_columns(&self) -> &[usize] {
        &self.extra
    }
}
