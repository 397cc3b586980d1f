use typed_builder::TypedBuilder;

use crate::client::GatewayClient;
use crate::domain::GatewayError;
use crate::domain::RawResponse;
use crate::domain::RequestParams;
use crate::transport::Transport;

/// CustomerLink service endpoint path, identical on both regional servers.
pub const CUSTOMER_LINK_ENDPOINT: &str = "/NetGate/CustomerLink.asmx";

/// A stored-card customer code, created or updated.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CustomerCodeRequest {
    /// Absent on creation; the vendor assigns one.
    #[builder(default, setter(into, strip_option))]
    pub customer_code: Option<String>,
    #[builder(setter(into))]
    pub first_name: String,
    #[builder(setter(into))]
    pub last_name: String,
    #[builder(setter(into))]
    pub credit_card_num: String,
    /// MMYY, as the vendor expects.
    #[builder(setter(into))]
    pub credit_card_expiry: String,
    #[builder(setter(into))]
    pub mop: String,
    /// Whether the vendor may charge the code on a schedule.
    #[builder(default)]
    pub recurring: bool,
    #[builder(default, setter(into, strip_option))]
    pub begin_date: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub end_date: Option<String>,
}

impl From<&CustomerCodeRequest> for RequestParams {
    fn from(request: &CustomerCodeRequest) -> Self {
        let mut params = RequestParams::new();
        if let Some(customer_code) = &request.customer_code {
            params.insert("customerCode", customer_code.as_str());
        }
        params.insert("firstName", request.first_name.as_str());
        params.insert("lastName", request.last_name.as_str());
        params.insert("creditCardNum", request.credit_card_num.as_str());
        params.insert("creditCardExpiry", request.credit_card_expiry.as_str());
        params.insert("mop", request.mop.as_str());
        params.insert("recurring", request.recurring);
        if let Some(begin_date) = &request.begin_date {
            params.insert("beginDate", begin_date.as_str());
        }
        if let Some(end_date) = &request.end_date {
            params.insert("endDate", end_date.as_str());
        }
        params
    }
}

/// Customer-code management operations.
#[derive(Debug)]
pub struct CustomerLink<'a, T> {
    client: &'a GatewayClient<T>,
}

impl<'a, T: Transport> CustomerLink<'a, T> {
    pub(crate) fn new(client: &'a GatewayClient<T>) -> Self {
        CustomerLink { client }
    }

    /// Stores a card against a new customer code.
    pub fn create_credit_card_customer_code(
        &self,
        request: &CustomerCodeRequest,
    ) -> Result<RawResponse, GatewayError> {
        self.client.call(
            CUSTOMER_LINK_ENDPOINT,
            "CreateCreditCardCustomerCodeV1",
            RequestParams::from(request),
        )
    }

    /// Updates the card or schedule stored against an existing code.
    pub fn update_credit_card_customer_code(
        &self,
        request: &CustomerCodeRequest,
    ) -> Result<RawResponse, GatewayError> {
        self.client.call(
            CUSTOMER_LINK_ENDPOINT,
            "UpdateCreditCardCustomerCodeV1",
            RequestParams::from(request),
        )
    }

    pub fn delete_customer_code(
        &self,
        customer_code: &str,
    ) -> Result<RawResponse, GatewayError> {
        let params = RequestParams::new().with("customerCode", customer_code);
        self.client
            .call(CUSTOMER_LINK_ENDPOINT, "DeleteCustomerCodeV1", params)
    }

    pub fn get_customer_code_detail(
        &self,
        customer_code: &str,
    ) -> Result<RawResponse, GatewayError> {
        let params = RequestParams::new().with("customerCode", customer_code);
        self.client
            .call(CUSTOMER_LINK_ENDPOINT, "GetCustomerCodeDetailV1", params)
    }
}
