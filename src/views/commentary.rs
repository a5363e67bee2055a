// src/views/commentary.rs

use super::options::{Demographic, Indicator};

/// Interpretation shown under the choropleth for `indicator`.
pub fn choropleth(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::PovertyRate => {
            "As we can see here, the states with the highest concentration of people living below the federal poverty level tend to be most concentrated in the southwest. This includes states like New Mexico, Texas, Arizona, and California."
        }
        Indicator::UnemploymentRate => {
            "We can see a more even distribution in unemployment here. However, it's perhaps worth noting again that many of the states with higher unemployment rates happen to be in the eastern half of the country. Especially, Louisiana, Mississippi, West Virginia, New York, Connecticut, New Jersey, Illinois, and Michigan."
        }
        Indicator::LaborForceParticipation => {
            "Despite the label, this plot depicts the percentages of adults not in the labor force by state. As we can see, there is a clear divide here. Many of the states with the highest percentages of adults not in the labor force are located in the south, such as Louisiana, Mississippi, Alabama, Arkansas, West Virginia, and Kentucky."
        }
        Indicator::EducationAboveHighSchool => {
            "As we can see, the states with the highest concentration of post-high school education are located in the northeast and the west. Whereas the states with the lowest concentration of post-high school education are located in the southern census region, such as West Virginia, Louisiana, Arkansas, and Mississippi"
        }
        Indicator::PercentAfricanAmerican => {
            "As we can see, the states with the highest concentrations of African-Americans are in the southern census region, such as Louisiana, Mississippi, and Georgia"
        }
        Indicator::PercentHispanic => {
            "As we can see, most of the states with the highest concentrations of Hispanics are in the western census region, such as New Mexico and California"
        }
        Indicator::PercentNativeAmerican => {
            "Again, most of the states with the highest concentrations of Native Americans are in the western census region. Most notably New Mexico, South Dakota, and Alaska"
        }
        Indicator::RentingRate => {
            "Most of the states here have a more even distribution. However, it's worth noting that West Virginia is well below the national average and states like California, Nevada, and New York are well above the national average of renters. This could indicate a higher cost of living for those states with high percentages of renters and thus higher SNAP participation."
        }
        Indicator::MortgageRate => {
            "Most of the states with the highest concentrations of people with mortgages tend to be in the northern half of the country, such as Maine, New Hampshire, Vermont, and Minnesota. In addition to renting rates, mortgage rates could potentially be a good indicator of cost of living."
        }
    }
}

/// Interpretation shown under the stacked bars for `demographic`.
pub fn stacked_bar(demographic: Demographic) -> &'static str {
    match demographic {
        Demographic::Race => {
            "This stacked bar plot shows the composition of racial minorities by percentages. It's worth noting here that according to this plot, the states with the largest percentages of racial minorities are New Mexico, Texas, and the District of Columbia. This plot has some relevance because it's likely that people who are members of a racial minority in the United States will have had less opportunity to build generational wealth because of historic barriers, which could potentially influence SNAP eligibility in the long run."
        }
        Demographic::EducationHighSchoolOrLess => {
            "This stacked bar plot shows the composition of people whose highest level of educational attainment is at the high school level or below. The states with the highest values in this plot are West Virginia, Louisiana, Arkansas, Kentucky, Pennsylvania, and Tennessee. This plot has some relevance as we could use educational attainment level as a proxy for economic mobility. So, the states with proportionately greater numbers of residents with a high school education or less may be more likely to have more residents that are SNAP eligible."
        }
        Demographic::EducationAboveHighSchool => {
            "This stacked bar plot shows the composition of people whose highest level of educational attainment is at higher than a high school level. This includes people with a bachelor's or graduate degree as well as those with some college education but not a degree and an associate's degree. This plot has some relevance as we could use educational attainment level as a proxy for economic mobility. So, in contrast to the previous plot, we can say that the states with the smallest values on this plot tend to have less upwardly economically mobile residents such as West Virginia or Louisiana. In contrast, the states with the largest values on this plot tend to be more upwardly economically mobile, such as the District of Columbia or Washington."
        }
        Demographic::Housing => {
            "This stacked bar plot shows the composition of people who rent or have a mortgage by state. The intuition behind this panel is that the states with the highest values on this plot are the states that tend to have the highest comparative cost of living and that are perhaps the least affordable. In a manner of speaking, these are the states where you don't get your bang for your buck, meaning that your salary does not go as far in these states as perhaps it would in more affordable states. So, it's likely that with a higher cost of living that there may also be a greater relative proportion of people who are SNAP eligible. Based on this plot, these states include the District of Columbia, Oregon, California, and Colorado."
        }
    }
}

/// Interpretation shown under the scatter plot of `indicator` against SNAP participation.
pub fn scatter(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::PovertyRate => {
            "This scatter plot shows the relationship at the state level between the poverty rate and the percentage of people that receive SNAP benefits. As we can see, there is a weak, slightly positive relationship between these two variables. This indicates that there is likely little evidence of feature significance."
        }
        Indicator::UnemploymentRate => {
            "This scatter plot shows the relationship at the state level between the unemployment rate and the percentage of people that receive SNAP benefits. As we can see, there is a strong positive relationship between these two variables. Thus, it's likely that unemployment has some influence on SNAP participation."
        }
        Indicator::LaborForceParticipation => {
            "This scatter plot shows the relationship at the state level between the percentage of people not in the labor force and the percentage of people that receive SNAP benefits. As we can see, there is a strong positive relationship between these two variables. Thus, it's likely that not being in the labor force has some influence on SNAP participation."
        }
        Indicator::EducationAboveHighSchool => {
            "This scatter plot shows the relationship at the state level between the percentage of people with post-high school education and the percentage of people that receive SNAP benefits. These two variables have a somewhat strong negative relationship. Thus, it's likely that educational attainment has some influence on SNAP participation."
        }
        Indicator::PercentAfricanAmerican => {
            "This scatter plot shows the relationship at the state level between the percentage of African-Americans and the percentage of people that receive SNAP benefits. As we can see, there is a weak, slightly positive relationship between these two variables. This indicates that there is likely little evidence of feature significance."
        }
        Indicator::PercentHispanic => {
            "This scatter plot shows the relationship at the state level between the percentage of Hispanic people and the percentage of people that receive SNAP benefits. As we can see, there is likely a correlation coefficient close to zero for these two variables. This indicates that this variable is not of any significance."
        }
        Indicator::PercentNativeAmerican => {
            "This scatter plot shows the relationship at the state level between the percentage of Native Americans and the percentage of people that receive SNAP benefits. As we can see, there is likely a correlation coefficient close to zero for these two variables. This indicates that this variable is not of any significance."
        }
        Indicator::RentingRate => {
            "This scatter plot shows the relationship at the state level between the renting rate and the percentage of people that receive SNAP benefits. As we can see, there is a weak, slightly negative relationship between these two variables. This indicates that there is likely little evidence of feature significance."
        }
        Indicator::MortgageRate => {
            "This scatter plot shows the relationship at the state level between the mortgage rate and the percentage of people that receive SNAP benefits. These two variables have a somewhat strong negative relationship. Thus, it's likely that mortgage rates have some influence on SNAP participation."
        }
    }
}
