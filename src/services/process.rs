use typed_builder::TypedBuilder;

use crate::client::GatewayClient;
use crate::domain::GatewayError;
use crate::domain::RawResponse;
use crate::domain::RequestParams;
use crate::transport::Transport;

/// ProcessLink service endpoint path, identical on both regional servers.
pub const PROCESS_LINK_ENDPOINT: &str = "/NetGate/ProcessLink.asmx";

/// A single credit-card charge.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreditCardPayment {
    #[builder(setter(into))]
    pub invoice_num: String,
    #[builder(setter(into))]
    pub credit_card_num: String,
    /// MMYY, as the vendor expects.
    #[builder(setter(into))]
    pub credit_card_expiry: String,
    #[builder(default, setter(into, strip_option))]
    pub cvv2: Option<String>,
    /// Method of payment, e.g. `VISA` or `MC`.
    #[builder(setter(into))]
    pub mop: String,
    #[builder(setter(into))]
    pub first_name: String,
    #[builder(setter(into))]
    pub last_name: String,
    #[builder(default, setter(into, strip_option))]
    pub address: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub city: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub state: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub zip_code: Option<String>,
    /// Decimal amount rendered as text, e.g. `"15.00"`.
    #[builder(setter(into))]
    pub total: String,
    #[builder(default, setter(into, strip_option))]
    pub comment: Option<String>,
}

impl From<&CreditCardPayment> for RequestParams {
    fn from(payment: &CreditCardPayment) -> Self {
        let mut params = RequestParams::new();
        params.insert("invoiceNum", payment.invoice_num.as_str());
        params.insert("creditCardNum", payment.credit_card_num.as_str());
        params.insert("creditCardExpiry", payment.credit_card_expiry.as_str());
        if let Some(cvv2) = &payment.cvv2 {
            params.insert("cvv2", cvv2.as_str());
        }
        params.insert("mop", payment.mop.as_str());
        params.insert("firstName", payment.first_name.as_str());
        params.insert("lastName", payment.last_name.as_str());
        if let Some(address) = &payment.address {
            params.insert("address", address.as_str());
        }
        if let Some(city) = &payment.city {
            params.insert("city", city.as_str());
        }
        if let Some(state) = &payment.state {
            params.insert("state", state.as_str());
        }
        if let Some(zip_code) = &payment.zip_code {
            params.insert("zipCode", zip_code.as_str());
        }
        params.insert("total", payment.total.as_str());
        if let Some(comment) = &payment.comment {
            params.insert("comment", comment.as_str());
        }
        params
    }
}

/// Authorization and refund operations.
#[derive(Debug)]
pub struct ProcessLink<'a, T> {
    client: &'a GatewayClient<T>,
}

impl<'a, T: Transport> ProcessLink<'a, T> {
    pub(crate) fn new(client: &'a GatewayClient<T>) -> Self {
        ProcessLink { client }
    }

    /// Charges a card once.
    pub fn process_credit_card(
        &self,
        payment: &CreditCardPayment,
    ) -> Result<RawResponse, GatewayError> {
        self.client.call(
            PROCESS_LINK_ENDPOINT,
            "ProcessCreditCardV1",
            RequestParams::from(payment),
        )
    }

    /// Charges a previously stored customer code.
    pub fn process_credit_card_with_customer_code(
        &self,
        customer_code: &str,
        invoice_num: &str,
        total: &str,
    ) -> Result<RawResponse, GatewayError> {
        let params = RequestParams::new()
            .with("customerCode", customer_code)
            .with("invoiceNum", invoice_num)
            .with("total", total);
        self.client.call(
            PROCESS_LINK_ENDPOINT,
            "ProcessCreditCardWithCustomerCodeV1",
            params,
        )
    }

    /// Refunds against a settled transaction. The vendor expects `total` as
    /// a negative amount.
    pub fn process_credit_card_refund_with_transaction_id(
        &self,
        transaction_id: &str,
        total: &str,
    ) -> Result<RawResponse, GatewayError> {
        let params = RequestParams::new()
            .with("transactionId", transaction_id)
            .with("total", total);
        self.client.call(
            PROCESS_LINK_ENDPOINT,
            "ProcessCreditCardRefundWithTransactionIdV1",
            params,
        )
    }
}
