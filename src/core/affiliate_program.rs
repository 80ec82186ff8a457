//! Affiliate Program 服務：Referral Partner Center 的部分功能

use crate::core::interface::InterfaceDeclaration;
use crate::domain::model::{MethodKind, ParamType, Parameter, RemoteMethodSignature};
use crate::utils::error::{RpcError, Result};
use std::fmt;
use std::str::FromStr;

pub const SERVICE_NAME: &str = "AffiliateProgramService";

const PROGRAM_ID: Parameter = Parameter::new("programId", ParamType::Int);
const AFFILIATE_ID: Parameter = Parameter::new("affiliateId", ParamType::Int);
const API_KEY: Parameter = Parameter::new("apiKey", ParamType::String);

pub static AFFILIATE_PROGRAM_SERVICE: InterfaceDeclaration = InterfaceDeclaration::new(
    SERVICE_NAME,
    &[
        RemoteMethodSignature {
            name: "getAffiliatesByProgram",
            parameters: &[PROGRAM_ID],
            kind: MethodKind::XmlRpc,
            description: "Lists the affiliates of a program with their contact data, \
                          including custom fields of the contact and affiliate records",
        },
        RemoteMethodSignature {
            name: "getProgramsForAffiliate",
            parameters: &[AFFILIATE_ID],
            kind: MethodKind::XmlRpc,
            description: "Lists the affiliate programs the affiliate belongs to",
        },
        RemoteMethodSignature {
            name: "getAffiliatePrograms",
            parameters: &[API_KEY],
            kind: MethodKind::XmlRpc,
            description: "Lists all affiliate programs in the application",
        },
        RemoteMethodSignature {
            name: "getResourcesForAffiliateProgram",
            parameters: &[PROGRAM_ID],
            kind: MethodKind::XmlRpc,
            description: "Lists the resources associated with the affiliate program",
        },
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffiliateProgramMethod {
    GetAffiliatesByProgram,
    GetProgramsForAffiliate,
    GetAffiliatePrograms,
    GetResourcesForAffiliateProgram,
}

impl AffiliateProgramMethod {
    pub const ALL: [AffiliateProgramMethod; 4] = [
        AffiliateProgramMethod::GetAffiliatesByProgram,
        AffiliateProgramMethod::GetProgramsForAffiliate,
        AffiliateProgramMethod::GetAffiliatePrograms,
        AffiliateProgramMethod::GetResourcesForAffiliateProgram,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AffiliateProgramMethod::GetAffiliatesByProgram => "getAffiliatesByProgram",
            AffiliateProgramMethod::GetProgramsForAffiliate => "getProgramsForAffiliate",
            AffiliateProgramMethod::GetAffiliatePrograms => "getAffiliatePrograms",
            AffiliateProgramMethod::GetResourcesForAffiliateProgram => {
                "getResourcesForAffiliateProgram"
            }
        }
    }

    pub fn signature(&self) -> &'static RemoteMethodSignature {
        // 宣告順序與 ALL 一致
        &AFFILIATE_PROGRAM_SERVICE.methods[*self as usize]
    }
}

impl FromStr for AffiliateProgramMethod {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| RpcError::UnknownMethod {
                service: SERVICE_NAME.to_string(),
                method: s.to_string(),
            })
    }
}

impl fmt::Display for AffiliateProgramMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
